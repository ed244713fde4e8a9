/// Creates a `String` from a string slice
/// or anything else `String::from` accepts.
///
/// # Examples
/// ```
/// use imapfetch_build_utils::string;
///
/// let tag = string!("latest");
/// assert_eq!(tag, String::from("latest"));
/// ```
#[macro_export]
macro_rules! string {
    ($str:expr) => {
        String::from($str)
    };
}

/// Creates a `Vec<String>` from a list of string-like values.
///
/// # Examples
/// ```
/// use imapfetch_build_utils::string_vec;
///
/// let tags = string_vec!["latest", format!("pr-{}", 42)];
/// assert_eq!(tags, vec![String::from("latest"), String::from("pr-42")]);
/// ```
#[macro_export]
macro_rules! string_vec {
    ($($string:expr),* $(,)?) => {
        vec![
            $($crate::string!($string),)*
        ]
    };
}
