mod home_tests;
mod listings_tests;
mod newsletter_tests;
