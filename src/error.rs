use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Errors {
    DocumentNotProvided,
    UnexpectedDocumentType,
    XmlParseError,
    ContainerNotFound,
    SerializationError,
}
