use bon::Builder;

use crate::{methods::Method, objects::File, prelude::*};

/// Get basic information about a file and prepare it for downloading.
///
/// Bots can download files of up to 20MB in size.
/// See also: <https://core.telegram.org/bots/api#getfile>.
#[derive(Clone, Debug, Builder, Serialize)]
#[must_use]
pub struct GetFile {
    #[builder(into)]
    pub file_id: String,
}

impl Method for GetFile {
    const NAME: &'static str = "getFile";

    type Response = File;
}
