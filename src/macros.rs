// src/macros.rs
//
// String shorthands used across the crate.

/// `s!()` → empty String, `s!(x)` → String::from(x).
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    // Works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate any number of string-likes into one String.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}
