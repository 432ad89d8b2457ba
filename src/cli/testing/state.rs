use crate::base;

/// The expected or actual contents of a working directory. An unset config
/// corresponds to a nonexistent config file. Ledgers are keyed by file name.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    ledgers: std::collections::BTreeMap<String, String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Adds a ledger file.
    pub fn with_ledger(mut self, name: &str, contents: &str) -> Self {
        self.ledgers.insert(name.into(), contents.into());
        self
    }

    /// Reads the config and every other file in `fs`'s directory.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config_path = fs.path::<base::Config>();
        let config = config_path
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());
        let ledgers = std::fs::read_dir(fs.dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| *p != config_path)
            .map(|p| {
                let name = p.file_name().unwrap().to_string_lossy().into_owned();
                (name, std::fs::read_to_string(&p).unwrap())
            })
            .collect();
        Self { config, ledgers }
    }
}

/// Representation of a working directory's file contents. An unset config
/// corresponds to a nonexistent config file.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    ledgers: Vec<(&'a str, &'a str)>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Adds a ledger file. Its contents are written verbatim, so they may
    /// contain malformed lines.
    pub fn with_ledger(mut self, name: &'a str, s: &'a str) -> Self {
        self.ledgers.push((name, s));
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not a
    /// valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        for (name, s) in &self.ledgers {
            std::fs::write(fs.resolve(name), s).unwrap()
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        for (name, s) in &self.ledgers {
            os = os.with_ledger(name, s);
        }
        os
    }
}

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}
