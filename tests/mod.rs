mod common;

mod command_runner_tests;
mod header_codec_tests;
