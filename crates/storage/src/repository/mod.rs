pub mod exercise;
pub mod workout;

pub use exercise::ExerciseRepository;
pub use workout::WorkoutRepository;
