#[derive(Clone)]
pub enum Msg {
    ApplyFormat(String),
    CopyToClipboard,
    OpenFileDialog,
    FileSelected(web_sys::File),
    UploadFinished { seq: u32, text: String },
    UploadFailed { seq: u32, message: String },
    DownloadPdf,
}
