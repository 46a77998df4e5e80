//! `impc words`: list the standard reserved words.

use std::io::{self, Write};

use imp_lexer_core::{Trie, RESERVED_WORDS};

pub fn render_reserved_words(out: &mut impl Write) -> io::Result<()> {
    let trie = Trie::standard();
    writeln!(
        out,
        "Reserved words ({} words, {} trie nodes):",
        trie.len(),
        trie.node_count()
    )?;
    for word in RESERVED_WORDS {
        writeln!(out, "  {word}")?;
    }
    Ok(())
}

pub fn list_reserved_words() {
    let stdout = io::stdout();
    if let Err(e) = render_reserved_words(&mut stdout.lock()) {
        eprintln!("error: failed to write output: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_word_once() {
        let mut out = Vec::new();
        render_reserved_words(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Reserved words (33 words,"));
        let words: Vec<&str> = lines.map(str::trim).collect();
        assert_eq!(words, RESERVED_WORDS);
    }
}
