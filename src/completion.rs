// Bash completion. The shell calls back into the binary with --compgen
// for every word being completed.

const SCRIPT: &str = r#"
_clock_completion() {
  COMPREPLY=( $(compgen -W '$(clock --compgen "${COMP_CWORD}" "${COMP_WORDS[COMP_CWORD-1]}" "${COMP_LINE}")' -- "${COMP_WORDS[COMP_CWORD]}") )
}
complete -F _clock_completion clock
"#;

const OPTIONS: &str = "--mode --help --version";
const MODES: &str = "12h 24h";

#[derive(Debug, PartialEq)]
pub enum Request {
    // Print the script that registers the completion function
    Script,
    // Suggest words for the given position
    Candidates { position: Option<u32>, previous: Option<String> },
}

impl Request {
    // Looks at the raw arguments, before any option parsing happens
    pub fn detect(args: &[String]) -> Option<Self> {
        match args.get(1).map(String::as_str) {
            Some("--completion") => Some(Request::Script),
            Some("--compgen") => Some(Request::Candidates {
                position: args.get(2).and_then(|word| word.trim().parse().ok()),
                previous: args.get(3).cloned(),
            }),
            _ => None,
        }
    }

    // Empty output means nothing to suggest
    pub fn respond(&self) -> &'static str {
        match self {
            Request::Script => SCRIPT,
            Request::Candidates { position: Some(1), .. } => OPTIONS,
            Request::Candidates { position: Some(2), previous: Some(previous) } if previous == "--mode" => MODES,
            Request::Candidates { .. } => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    fn respond(words: &[&str]) -> Option<&'static str> {
        Request::detect(&args(words)).map(|request| request.respond())
    }

    #[test]
    fn normal_invocations_are_not_completion() {
        assert_eq!(Request::detect(&args(&["clock"])), None);
        assert_eq!(Request::detect(&args(&["clock", "--mode", "12h"])), None);
        assert_eq!(Request::detect(&args(&["clock", "--mode", "--completion"])), None);
    }

    #[test]
    fn script_registers_function() {
        let script = respond(&["clock", "--completion"]).unwrap();

        assert!(script.contains("complete -F _clock_completion clock"));
        assert!(script.contains("clock --compgen"));
    }

    #[test]
    fn first_position_suggests_options() {
        assert_eq!(respond(&["clock", "--compgen", "1", "clock", "clock "]), Some("--mode --help --version"));
    }

    #[test]
    fn second_position_after_mode_suggests_modes() {
        assert_eq!(respond(&["clock", "--compgen", "2", "--mode", "clock --mode "]), Some("12h 24h"));
        assert_eq!(respond(&["clock", "--compgen", "2", "--help"]), Some(""));
        assert_eq!(respond(&["clock", "--compgen", "2"]), Some(""));
    }

    #[test]
    fn other_positions_suggest_nothing() {
        assert_eq!(respond(&["clock", "--compgen", "3", "12h"]), Some(""));
        assert_eq!(respond(&["clock", "--compgen", "x", "--mode"]), Some(""));
        assert_eq!(respond(&["clock", "--compgen"]), Some(""));
    }
}
