use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricError {
    #[error("division by zero: {divisor} must be non-zero")]
    DivisionByZero { divisor: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence exhausted at bound {end}")]
    Exhausted { end: i64 },
    #[error("square of {current} does not fit in i64")]
    Overflow { current: i64 },
}

pub type MetricResult<T> = Result<T, MetricError>;
