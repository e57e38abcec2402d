use text_diff::{compute_diff, ComparisonOptions, Direction, SpanKind};

fn main() {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    let diff = compute_diff(text1, text2, &ComparisonOptions::default());

    // Print diff statistics
    println!("Diff statistics: {}", diff.stats());
    println!("  Total hunks: {}", diff.hunk_count());

    // Print the export form
    println!("\nPlain text:");
    println!("{}", diff.to_plain_text());

    // Print hunks with inline highlighting for changed lines
    println!("\nHunks:");
    for (i, hunk) in diff.hunks().iter().enumerate() {
        println!(
            "Hunk {}: {} (left {:?}, right {:?})",
            i,
            hunk.kind(),
            hunk.left_line(),
            hunk.right_line()
        );

        if let Some((removed, added)) = hunk.highlight() {
            for highlight in [removed, added] {
                let rendered: String = highlight
                    .spans
                    .iter()
                    .map(|span| match span.kind {
                        SpanKind::Plain => span.text.clone(),
                        SpanKind::Highlighted => format!("[{}]", span.text),
                    })
                    .collect();
                println!("    {}: {}", highlight.side, rendered);
            }
        }
    }

    // Walk the navigation stops
    let index = diff.navigation();
    let mut position = None;
    println!("\nNavigation ({} stops):", index.len());
    for _ in 0..index.len() {
        position = index.step(position, Direction::Next);
        if let Some(hunk_index) = position.and_then(|p| index.hunk_index(p)) {
            println!("  -> hunk {}", hunk_index);
        }
    }

    // Ignore case and whitespace
    let options = ComparisonOptions::new()
        .ignore_case(true)
        .ignore_whitespace(true);
    let diff = compute_diff("Hello   World", "hello world", &options);
    println!("\nWith ignore options: {}", diff.stats());
}
