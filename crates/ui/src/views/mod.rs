mod quiz;
mod result;
mod start;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use result::ResultView;
pub use start::StartView;
