pub mod preonboarding;
