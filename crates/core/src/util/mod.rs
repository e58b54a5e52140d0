pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and outputs the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!(
            $log_level,
            "{} took {} µs",
            $label,
            elapsed.as_micros()
        );
        value
    }};
}

/// Floor-divide an integer by 2. Unlike `/`, this rounds toward negative
/// infinity, so `-1 / 2 == -1`. This is what the offset conversions need, since
/// odd rows/columns have to line up identically on both sides of the origin.
pub const fn half_floor(value: i32) -> i32 {
    value.div_euclid(2)
}
