use crate::base;

/// Working directory access: the config file and ledgers named relative to it.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Serde: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Serde for base::Config {
    const FILENAME: &'static str = ".minibudget.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Serde,
    {
        self.dir.join(T::FILENAME)
    }

    /// Resolves `p` against the working directory. Absolute paths are
    /// returned as is.
    pub fn resolve<P>(&self, p: P) -> std::path::PathBuf
    where
        P: AsRef<std::path::Path>,
    {
        self.dir.join(p)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Serde,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Serde,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }

    /// Reads and parses a ledger file. Malformed lines do not fail the read;
    /// see [`base::Ledger::parse`].
    pub fn read_ledger<P>(&self, p: P, default_currency: &str) -> std::io::Result<base::Ledger>
    where
        P: AsRef<std::path::Path>,
    {
        let s = std::fs::read_to_string(self.resolve(p))?;
        Ok(base::Ledger::parse(&s, default_currency))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
    // This box can be removed once specialization stabilizes.
}
