// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or variable
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! selector {
    // Compile-once CSS selector. Literal only, so a bad selector is a
    // programming error caught by the first test that touches it.
    ($css:literal) => {{
        static SEL: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| ::scraper::Selector::parse($css).unwrap());
        &*SEL
    }};
}
