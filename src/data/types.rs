use fieldcheck::file_input::{InputPath, PairFileIterator, RawPair, create_file_reader};
use fieldcheck::InputError;

#[derive(Debug, Clone)]
pub enum DataSource {
    Single { latitude: String, longitude: String },
    File(InputPath),
}

pub type PairResult = Result<RawPair, InputError>;
pub type PairStream = Box<dyn Iterator<Item = PairResult>>;

impl DataSource {
    pub fn uses_stdin(&self) -> bool {
        matches!(self, DataSource::File(InputPath::Stdin))
    }

    pub fn is_single(&self) -> bool {
        matches!(self, DataSource::Single { .. })
    }

    pub fn into_stream(self) -> Result<PairStream, InputError> {
        match self {
            DataSource::Single {
                latitude,
                longitude,
            } => Ok(Box::new(std::iter::once(Ok(RawPair {
                line: 1,
                latitude: Some(latitude),
                longitude: Some(longitude),
            })))),
            DataSource::File(path) => {
                let reader = create_file_reader(&path)?;
                Ok(Box::new(PairFileIterator::new(reader)))
            }
        }
    }
}
