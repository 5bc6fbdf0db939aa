use std::fmt;

pub type LogvarkResult<T> = Result<T, LogvarkError>;

#[derive(Debug)]
pub enum LogvarkError {
    Message(String),
    IOError(std::io::Error),
    Syslog(syslog::Error),
    Chain(String, Box<Self>),
    List(LogvarkErrorList),
    DuplicateDestination(u32),
    ReservedId(u32),
}

impl LogvarkError {
    pub fn msg<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Message(msg.into())
    }

    pub fn wrap<S>(msg: S, chained: Self) -> Self
    where
        S: Into<String>,
    {
        Self::Chain(msg.into(), Box::new(chained))
    }
}

pub trait LogvarkWrap<T, E> {
    /// Wrap the error value with additional context.
    fn wrap<C>(self, context: C) -> LogvarkResult<T>
    where
        C: Into<String>,
        E: Into<LogvarkError>;
}

impl<T, E> LogvarkWrap<T, E> for Result<T, E>
where
    E: Into<LogvarkError>,
{
    fn wrap<C>(self, msg: C) -> LogvarkResult<T>
    where
        C: Into<String>,
        E: Into<LogvarkError>,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(error) => Err(LogvarkError::wrap(msg, error.into())),
        }
    }
}

impl fmt::Display for LogvarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(s) => write!(f, "{s}"),
            Self::Chain(s, e) => write!(f, "{s}: {e}"),
            Self::IOError(e) => write!(f, "IO error: {e}"),
            Self::Syslog(e) => write!(f, "syslog error: {e}"),
            Self::DuplicateDestination(id) => {
                write!(f, "log destination {id} is already registered")
            }
            Self::ReservedId(id) => write!(
                f,
                "destination id {id} is reserved for built-in log destinations"
            ),
            Self::List(list) => {
                // some extra code to only add \n when it contains multiple errors
                let mut iter = list.0.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{first}")?;
                }
                for err in iter {
                    write!(f, "\n{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<std::io::Error> for LogvarkError {
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err)
    }
}

impl From<syslog::Error> for LogvarkError {
    fn from(err: syslog::Error) -> Self {
        Self::Syslog(err)
    }
}

#[derive(Debug)]
pub struct LogvarkErrorList(Vec<LogvarkError>);

impl LogvarkErrorList {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn push(&mut self, err: LogvarkError) {
        self.0.push(err)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// we do not need it but clippy wants it
impl Default for LogvarkErrorList {
    fn default() -> Self {
        Self::new()
    }
}
