#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:literal,
        pattern: $pat:literal,
        handler: $handler:expr $(,)?
    ) => {
        $crate::engine::Rule { name: $name, pattern: $crate::regex!($pat), handler: $handler }
    };
}
