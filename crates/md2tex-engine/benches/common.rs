// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code_span`.\n\n> [!note] Claim @ For all $x > 0$ we have $x^2 - x > -1$.\n\n- Bullet point\n\t- Nested item with $[a, b]$\n- Another item\n\n```python\ndef example():\n    return [1, 2, 3]\n```\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        let indent = "\t".repeat(i % (depth + 1));
        content.push_str(&format!("{indent}- item {i}\n"));
    }
    content
}
