use itertools::{Itertools, PeekingNext};

// A whitespace separated word of the grammar file and the line it sits on
#[derive(PartialEq, Debug, Clone)]
pub struct Token {
    pub text: String,
    pub line: usize
}

pub fn lex_word(line: &mut impl PeekingNext<Item = char>) -> String {
    line.peeking_take_while(|c| !c.is_whitespace()).collect()
}

pub fn lex_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(c) = line_chars.peek() {
        if c.is_whitespace() {
            line_chars.next();
        } else {
            words.push(lex_word(&mut line_chars));
        }
    }

    return words;
}

// Lines are numbered from 1
pub fn lex_source(source: &str) -> Vec<Token> {
    source.lines()
        .enumerate()
        .flat_map(|(num, line)| lex_line(line)
            .into_iter()
            .map(move |text| Token { text, line: num + 1 }))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn lex_normal_word() {
        let lines = vec![
            "S->aSb S->e",
            "abc",
            "A\tB"
        ];
        // (result from the function, rest of the iterator)
        let answers = vec![
            ("S->aSb", " S->e"),
            ("abc", ""),
            ("A", "\tB")
        ];

        for (line, (answer_word, answer_rest)) in zip(lines, answers) {
            let mut chars = line.chars().peekable();
            assert_eq!(lex_word(&mut chars), answer_word);
            assert_eq!(chars.collect::<String>(), answer_rest);
        }
    }

    #[test]
    fn lex_normal_line() {
        let lines = vec![
            "2 a b",
            "   S  ",
            "",
            "1\tS->aS"
        ];
        let answers = vec![
            vec!["2", "a", "b"],
            vec!["S"],
            vec![],
            vec!["1", "S->aS"]
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(lex_line(line), answer);
        }
    }

    #[test]
    fn lex_source_tracks_lines() {
        let source = "2 a b\n\n1 S\r\nS\n";

        assert_eq!(lex_source(source), vec![
            Token { text: "2".to_string(), line: 1 },
            Token { text: "a".to_string(), line: 1 },
            Token { text: "b".to_string(), line: 1 },
            Token { text: "1".to_string(), line: 3 },
            Token { text: "S".to_string(), line: 3 },
            Token { text: "S".to_string(), line: 4 },
        ]);
    }
}
