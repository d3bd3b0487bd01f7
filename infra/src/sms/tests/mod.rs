//! Unit tests for SMS module

pub mod mock_sms_tests;
#[cfg(feature = "aws-sns")]
pub mod aws_sns_tests;
