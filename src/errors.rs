#[derive(Debug)]
pub enum ParsingError {
    BadData(String),
    EncodeDecodeError(::std::borrow::Cow<'static, str>),
    IoError(::std::io::Error),
}

impl ::std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        match *self {
            ParsingError::BadData(ref err) => ::std::fmt::Display::fmt(err, f),
            ParsingError::EncodeDecodeError(ref err) => ::std::fmt::Display::fmt(err, f),
            ParsingError::IoError(ref err) => ::std::fmt::Display::fmt(err, f),
        }
    }
}

impl From<String> for ParsingError {
    fn from(err: String) -> ParsingError {
        ParsingError::BadData(err)
    }
}

impl From<::std::borrow::Cow<'static, str>> for ParsingError {
    fn from(err: ::std::borrow::Cow<'static, str>) -> ParsingError {
        ParsingError::EncodeDecodeError(err)
    }
}

impl From<::std::io::Error> for ParsingError {
    fn from(err: ::std::io::Error) -> ParsingError {
        ParsingError::IoError(err)
    }
}

impl ::std::error::Error for ParsingError {}

#[derive(Debug)]
pub enum WriteError {
    BadInput(String),
    /// Version selection failures. Every per-frame and per-option reason is
    /// collected here rather than only the first.
    Unsupported(Vec<String>),
    EncodeDecodeError(::std::borrow::Cow<'static, str>),
    IoError(::std::io::Error),
}

impl ::std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        match *self {
            WriteError::BadInput(ref err) => ::std::fmt::Display::fmt(err, f),
            WriteError::Unsupported(ref reasons) => {
                ::std::fmt::Display::fmt(&reasons.join("; "), f)
            }
            WriteError::EncodeDecodeError(ref err) => ::std::fmt::Display::fmt(err, f),
            WriteError::IoError(ref err) => ::std::fmt::Display::fmt(err, f),
        }
    }
}

impl From<String> for WriteError {
    fn from(err: String) -> WriteError {
        WriteError::BadInput(err)
    }
}

impl From<::std::borrow::Cow<'static, str>> for WriteError {
    fn from(err: ::std::borrow::Cow<'static, str>) -> WriteError {
        WriteError::EncodeDecodeError(err)
    }
}

impl From<::std::io::Error> for WriteError {
    fn from(err: ::std::io::Error) -> WriteError {
        WriteError::IoError(err)
    }
}

impl ::std::error::Error for WriteError {}
