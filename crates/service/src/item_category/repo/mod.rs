pub mod seaorm;
