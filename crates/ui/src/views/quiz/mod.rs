mod audio;
mod dialog;
mod practice;
mod results;
mod scripts;
mod selection;
mod view;

pub use view::QuizView;
#[cfg(test)]
pub(crate) use view::QuizTestHandles;
