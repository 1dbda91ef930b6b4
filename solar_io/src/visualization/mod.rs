pub mod drawable;
