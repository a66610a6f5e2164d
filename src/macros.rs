// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
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
macro_rules! stats {
    // Stat line shorthand!
    //   stats!("J Doe"; AB => 4, H => 1, HR => 1)
    // Codes are StatCode variant names; unlisted stats stay 0.
    ($player:expr $(; $($code:ident => $val:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut line = $crate::stats::PlayerGameStats::new($player);
        $($(
            line.set($crate::stats::StatCode::$code, $val);
        )*)?
        line
    }};
}
