// tests/property_tokens.rs

//! Property tests for the token filter, the join rendering and the quoting
//! helper.

use proptest::prelude::*;

use shellstack::command::{Arg, ArgList, Command};
use shellstack::exec::shell_quote;
use shellstack::CommandStack;

proptest! {
    /// The filter drops exactly the empty renderings and preserves order.
    #[test]
    fn falsy_filter_keeps_non_empty_tokens_in_order(
        tokens in proptest::collection::vec(proptest::option::of("[a-z0-9/_.-]{0,8}"), 0..16)
    ) {
        let list: ArgList = tokens.iter().map(|token| Arg::from(token.clone())).collect();
        let command = Command::new("prog", list);

        let expected: Vec<String> = tokens
            .into_iter()
            .flatten()
            .filter(|token| !token.is_empty())
            .collect();

        prop_assert_eq!(command.options(), expected.as_slice());
    }

    /// All-default stacks chain with ` && ` and nothing trails the last
    /// command.
    #[test]
    fn default_joins_render_as_double_ampersands(
        tokens in proptest::collection::vec("[a-z]{1,6}", 1..8)
    ) {
        let mut stack = CommandStack::new();
        stack.set_executable("tool");
        for token in &tokens {
            stack.push_to_stack(token.as_str(), false, None, &[]);
        }

        let expected = tokens
            .iter()
            .map(|token| format!("tool {token}"))
            .collect::<Vec<_>>()
            .join(" && ");

        prop_assert_eq!(stack.get_stacked(), expected);
    }

    /// All-allow-fail stacks chain with `; `.
    #[test]
    fn allow_fail_joins_render_as_semicolons(
        tokens in proptest::collection::vec("[a-z]{1,6}", 1..8)
    ) {
        let mut stack = CommandStack::new();
        stack.set_executable("tool");
        for token in &tokens {
            stack.push_to_stack(token.as_str(), true, None, &[]);
        }

        let expected = tokens
            .iter()
            .map(|token| format!("tool {token}"))
            .collect::<Vec<_>>()
            .join("; ");

        prop_assert_eq!(stack.get_stacked(), expected);
    }

    /// Quoting is reversible for any printable token.
    #[test]
    fn shell_quote_round_trips(token in "[ -~]{0,12}") {
        let quoted = shell_quote(&token);

        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));

        let inner = &quoted[1..quoted.len() - 1];
        prop_assert_eq!(inner.replace(r"'\''", "'"), token);
    }

    /// Script rendering always starts with the shebang block and ends with
    /// a newline once any command is stacked.
    #[test]
    fn scripts_are_newline_terminated(
        tokens in proptest::collection::vec("[a-z]{1,6}", 1..8)
    ) {
        let mut stack = CommandStack::new();
        stack.set_executable("tool");
        for token in &tokens {
            stack.push_to_stack(token.as_str(), false, None, &[]);
        }

        let script = stack.to_script();
        prop_assert!(script.starts_with("#!/bin/bash\n\n"));
        prop_assert!(script.ends_with('\n'));
        // Shebang line, the blank line after it, then one line per command.
        prop_assert_eq!(script.lines().count(), tokens.len() + 2);
    }
}
