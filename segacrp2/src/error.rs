#[derive(thiserror::Error)]
pub enum Error {
    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // crate errors
    #[error("unknown cpu part number \"{0}\"")]
    UnknownVariant(String),

    #[error("rom image is empty")]
    EmptyImage,

    #[error(
        "rom image is {0:#x} bytes, larger than the {:#x} byte encrypted region",
        super::ENCRYPTED_REGION
    )]
    ImageTooLarge(usize),

    #[error("opcode buffer is {got:#x} bytes but rom image is {expected:#x} bytes")]
    LengthMismatch { expected: usize, got: usize },

    #[error("output file already exists: \"{0}\"")]
    OutputExists(String),

    #[error("more than one input would be written to \"{0}\"")]
    DuplicateOutput(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
