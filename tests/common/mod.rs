#![allow(dead_code)]

pub mod command;
pub mod file;

/// Read the whole stdout of a finished command as text
pub fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

/// Read the whole stderr of a finished command as text
pub fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).expect("stderr is not UTF-8")
}
