//! Element names of the packed document.
//!
//! ```text
//! methods
//!   method*
//!     javaDoc?      head | return | param | see | throws, in token order
//!     description   name, type, parameters (param: type, name)*, owner
//!     contract?     enters (enter*), exits (exit*), exitIds ((exitId, exits)*)
//! ```

use crate::model::DocTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Methods,
    Method,
    JavaDoc,
    Head,
    Param,
    Return,
    See,
    Throws,
    Description,
    Name,
    Type,
    Parameters,
    Owner,
    Contract,
    Enter,
    Enters,
    Exit,
    Exits,
    ExitId,
    ExitIds,
}

impl Element {
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Methods => "methods",
            Element::Method => "method",
            Element::JavaDoc => "javaDoc",
            Element::Head => "head",
            Element::Param => "param",
            Element::Return => "return",
            Element::See => "see",
            Element::Throws => "throws",
            Element::Description => "description",
            Element::Name => "name",
            Element::Type => "type",
            Element::Parameters => "parameters",
            Element::Owner => "owner",
            Element::Contract => "contract",
            Element::Enter => "enter",
            Element::Enters => "enters",
            Element::Exit => "exit",
            Element::Exits => "exits",
            Element::ExitId => "exitId",
            Element::ExitIds => "exitIds",
        }
    }
}

impl From<DocTag> for Element {
    fn from(tag: DocTag) -> Self {
        match tag {
            DocTag::Head => Element::Head,
            DocTag::Return => Element::Return,
            DocTag::Param => Element::Param,
            DocTag::See => Element::See,
            DocTag::Throws => Element::Throws,
        }
    }
}
