#[cfg(feature = "tracing")]
macro_rules! btrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "bilist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! btrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! bdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "bilist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! bwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "bilist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bwarn {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! berror {
    ($($tt:tt)*) => {
        tracing::error!(target: "bilist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! berror {
    ($($tt:tt)*) => {};
}
