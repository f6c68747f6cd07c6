//! Line parsing for the interactive shell

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line
    Empty,
    /// `0`: leave the shell
    Exit,
    /// `1`: render the last valid word
    Semantics,
    /// Anything else: a word to analyze, already lower-cased
    Analyze(String),
}

impl Command {
    /// Parse a raw input line
    pub fn parse(line: &str) -> Self {
        let input = line.trim();

        match input {
            "" => Self::Empty,
            "0" => Self::Exit,
            "1" => Self::Semantics,
            word => Self::Analyze(word.to_ascii_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_commands() {
        assert_eq!(Command::parse("0\n"), Command::Exit);
        assert_eq!(Command::parse("  1  "), Command::Semantics);
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse(" \t\r\n"), Command::Empty);
    }

    #[test]
    fn test_words_are_trimmed_and_lowered() {
        assert_eq!(
            Command::parse("  AgUa \n"),
            Command::Analyze("agua".to_string())
        );
    }

    #[test]
    fn test_numbers_other_than_commands_are_words() {
        assert_eq!(Command::parse("10"), Command::Analyze("10".to_string()));
    }

    #[test]
    fn test_inner_spaces_are_kept() {
        assert_eq!(Command::parse("a b"), Command::Analyze("a b".to_string()));
    }
}
