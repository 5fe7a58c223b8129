// src/macros.rs

//! Convenience macros for building argument lists.

/// Build an [`ArgList`](crate::command::ArgList) from mixed values.
///
/// Every element goes through [`Arg::from`](crate::command::Arg), so
/// `Option`s, `bool`s and integers mix freely with string tokens and the
/// falsy filter sorts them out:
///
/// ```
/// use shellstack::args;
/// use shellstack::command::Command;
///
/// let command = Command::new("test", args!["-n", "0", "", false]);
/// assert_eq!(command.options(), ["-n", "0"]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::command::ArgList::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        let mut list = $crate::command::ArgList::new();
        $(list.push($crate::command::Arg::from($arg));)+
        list
    }};
}
