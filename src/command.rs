// src/command.rs

//! Command modelling: a single invocation and the token filter applied to
//! its options.
//!
//! A [`Command`] is immutable once constructed and owns everything needed to
//! render itself as a literal script fragment: the program name, the
//! filtered option tokens, environment overrides (in insertion order) and
//! the join policy used when the command sits inside a chained line.

/// A single candidate command-line token.
///
/// `Arg` exists so adapter code can hand over options without pre-filtering
/// them: optional flags map naturally from `bool` and `Option<T>`, and
/// numeric arguments keep their value even when it is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg(Option<String>);

impl Arg {
    /// The rendered token, or `None` when the value carries nothing.
    ///
    /// This is the falsy filter: absent values, `false` and empty strings
    /// render to nothing and get dropped, while `"0"` survives.
    pub fn render(self) -> Option<String> {
        self.0.filter(|token| !token.is_empty())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg(Some(value.to_string()))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg(Some(value))
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg(Some(value.clone()))
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        // A set flag renders as "1", an unset one renders as nothing.
        Arg(value.then(|| "1".to_string()))
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Arg(None),
        }
    }
}

macro_rules! arg_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg(Some(value.to_string()))
                }
            }
        )*
    };
}

arg_from_int!(i32, i64, u32, u64, usize);

/// An ordered list of candidate tokens.
///
/// Build one with the [`args!`](crate::args) macro, or convert from a single
/// string (normalised to a one-element list, the token kept verbatim even
/// when it contains spaces).
#[derive(Debug, Clone, Default)]
pub struct ArgList(Vec<Arg>);

impl ArgList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, arg: Arg) {
        self.0.push(arg);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply the falsy filter and keep what remains.
    fn into_tokens(self) -> Vec<String> {
        self.0.into_iter().filter_map(Arg::render).collect()
    }
}

impl From<&str> for ArgList {
    fn from(value: &str) -> Self {
        ArgList(vec![Arg::from(value)])
    }
}

impl From<String> for ArgList {
    fn from(value: String) -> Self {
        ArgList(vec![Arg::from(value)])
    }
}

impl From<Vec<Arg>> for ArgList {
    fn from(value: Vec<Arg>) -> Self {
        ArgList(value)
    }
}

impl From<Vec<String>> for ArgList {
    fn from(value: Vec<String>) -> Self {
        ArgList(value.into_iter().map(Arg::from).collect())
    }
}

impl FromIterator<Arg> for ArgList {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        ArgList(iter.into_iter().collect())
    }
}

/// How a command joins to its successor on a single chained line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinPolicy {
    /// `&&`: the next command only runs when this one succeeded.
    #[default]
    Default,
    /// `;`: the next command runs regardless of this one's outcome.
    AllowFail,
}

impl JoinPolicy {
    pub fn separator(self) -> &'static str {
        match self {
            JoinPolicy::Default => " && ",
            JoinPolicy::AllowFail => "; ",
        }
    }
}

/// One invocation: program, filtered options, environment overrides and
/// join policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    executable: String,
    options: Vec<String>,
    env_vars: Vec<(String, String)>,
    join: JoinPolicy,
}

impl Command {
    /// Build a command. The options go through the falsy filter: `None`,
    /// `false` and empty strings are dropped, literal zeroes survive.
    pub fn new(executable: impl Into<String>, options: impl Into<ArgList>) -> Self {
        Command {
            executable: executable.into(),
            options: options.into().into_tokens(),
            env_vars: Vec::new(),
            join: JoinPolicy::Default,
        }
    }

    /// Add an environment override. Insertion order is the render order.
    pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((name.into(), value.into()));
        self
    }

    /// Let the rest of a chained line run even when this command fails.
    pub fn allow_fail(mut self, allow_fail: bool) -> Self {
        self.join = if allow_fail {
            JoinPolicy::AllowFail
        } else {
            JoinPolicy::Default
        };
        self
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn env_vars(&self) -> &[(String, String)] {
        &self.env_vars
    }

    pub fn join_policy(&self) -> JoinPolicy {
        self.join
    }

    /// The separator rendered after this command when it is not the last
    /// element of a chained line.
    pub fn join(&self) -> &'static str {
        self.join.separator()
    }

    /// Render the command as a literal script statement.
    ///
    /// Environment overrides come first, each terminated by a single space,
    /// then the program and its options joined by single spaces. No quoting
    /// is applied here; callers that need quotes embed them in the tokens.
    pub fn generate_script(&self, trailing_newline: bool) -> String {
        let mut script = String::new();
        for (name, value) in &self.env_vars {
            script.push_str(name);
            script.push('=');
            script.push_str(value);
            script.push(' ');
        }
        script.push_str(&self.executable);
        if !self.options.is_empty() {
            script.push(' ');
            script.push_str(&self.options.join(" "));
        }
        if trailing_newline {
            script.push('\n');
        }
        script
    }
}
