//! POSIX shell word splitting for assignment files

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Error, Result};

/// A shell word, or the bare `=` operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Word {
    pub text: String,
    /// True for an unquoted `=` standing on its own
    pub is_assign: bool,
    /// Line the word starts on (1-based)
    pub line: usize,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    words: Vec<Word>,
    current: Option<(String, usize)>,
}

/// Split `source` into words.
///
/// Quoting follows POSIX: single quotes are literal, double quotes allow
/// `\` to escape `$`, `` ` ``, `"`, `\` and newline, and an unquoted `\`
/// escapes any character. An unquoted `=` is always a word of its own.
pub(crate) fn split(source: &str) -> Result<Vec<Word>> {
    let mut lexer = Lexer {
        chars: source.chars().peekable(),
        line: 1,
        words: Vec::new(),
        current: None,
    };
    lexer.run()?;
    Ok(lexer.words)
}

impl Lexer<'_> {
    fn run(&mut self) -> Result<()> {
        while let Some(c) = self.chars.next() {
            match c {
                '\n' => {
                    self.finish_word();
                    self.line += 1;
                }
                c if c.is_whitespace() => self.finish_word(),
                '#' if self.current.is_none() => self.skip_comment(),
                '=' => {
                    self.finish_word();
                    self.words.push(Word {
                        text: "=".to_string(),
                        is_assign: true,
                        line: self.line,
                    });
                }
                '\\' => match self.chars.next() {
                    Some('\n') => self.line += 1,
                    Some(escaped) => self.buffer().push(escaped),
                    None => return Err(Error::TrailingEscape { line: self.line }),
                },
                '\'' => self.single_quoted()?,
                '"' => self.double_quoted()?,
                other => self.buffer().push(other),
            }
        }
        self.finish_word();
        Ok(())
    }

    fn buffer(&mut self) -> &mut String {
        let line = self.line;
        &mut self.current.get_or_insert_with(|| (String::new(), line)).0
    }

    fn finish_word(&mut self) {
        if let Some((text, line)) = self.current.take() {
            self.words.push(Word {
                text,
                is_assign: false,
                line,
            });
        }
    }

    fn skip_comment(&mut self) {
        while self.chars.next_if(|&c| c != '\n').is_some() {}
    }

    fn single_quoted(&mut self) -> Result<()> {
        let start = self.line;
        self.buffer();
        loop {
            match self.chars.next() {
                Some('\'') => return Ok(()),
                Some(c) => self.push_quoted(c),
                None => {
                    return Err(Error::UnterminatedQuote {
                        quote: '\'',
                        line: start,
                    });
                }
            }
        }
    }

    fn double_quoted(&mut self) -> Result<()> {
        let start = self.line;
        self.buffer();
        loop {
            match self.chars.next() {
                Some('"') => return Ok(()),
                Some('\\') => match self.chars.peek().copied() {
                    Some('\n') => {
                        self.chars.next();
                        self.line += 1;
                    }
                    Some(c @ ('$' | '`' | '"' | '\\')) => {
                        self.chars.next();
                        self.buffer().push(c);
                    }
                    _ => self.buffer().push('\\'),
                },
                Some(c) => self.push_quoted(c),
                None => {
                    return Err(Error::UnterminatedQuote {
                        quote: '"',
                        line: start,
                    });
                }
            }
        }
    }

    fn push_quoted(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
        }
        self.buffer().push(c);
    }
}
