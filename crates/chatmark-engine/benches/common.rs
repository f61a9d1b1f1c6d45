// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_message(size: usize) -> String {
    let base = "## Overview\n\nHere is the plan:\n\n1. Read the `config`\n2. Apply **changes**\n3. See [docs](https://example.com)\n\n**Note:** back up first.\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n- *quick* check\n- done\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_history_titles(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Conversation {i} about Rust lifetimes and React hooks"))
        .collect()
}
