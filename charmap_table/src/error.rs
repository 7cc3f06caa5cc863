use std::io;

use failure::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "cannot read {}: {}", path, cause)]
    FileAccess {
        path: String,
        #[fail(cause)]
        cause: io::Error,
    },
}
