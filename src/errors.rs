use std::{error::Error, fmt::Display};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LIBRARY-SPECIFIC INSTANCE OF RESULT                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



pub type GraphResult<OkType> = Result<OkType, GraphError>;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ERROR KINDS                                                                       *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Error kinds
///
/// ## Description
/// Classification of the errors algorithms and views can report at runtime.
///
/// * `OutOfRange` - a precondition on the arguments was violated: a source  vertex  ID
/// names no vertex of the graph, or a caller-supplied output container is smaller than
/// the number of vertices.
/// * `InvalidWeight` - a negative edge weight was passed to an algorithm that  demands
/// non-negative weights (only reachable with signed weight types).
/// * `Contract` - a structural promise made by the graph was found to be broken  while
/// an algorithm was running (e.g. an adjacency advertised as ordered was not).
/// * `Internal` - an internal invariant of an algorithm itself  was  broken;  such  an
/// error always indicates a bug in this library and should be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphErrorKind {
    OutOfRange,
    InvalidWeight,
    Contract,
    Internal,
}

// GraphErrorKind::Display
impl Display for GraphErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GraphErrorKind::OutOfRange => "out of range",
            GraphErrorKind::InvalidWeight => "invalid weight",
            GraphErrorKind::Contract => "broken contract",
            GraphErrorKind::Internal => "internal",
        })
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ERRORS                                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Library error
///
/// ## Description
/// The error type reported by every fallible function of the library. Carries the path
/// of the reporting function, the [kind][GraphErrorKind] of the failure and  a  human-
/// readable message.
#[derive(Debug)]
pub struct GraphError {
    kind: GraphErrorKind,
    message: String,
}

// Implementation of GraphError
impl GraphError {
    pub fn new<StringType>(kind: GraphErrorKind, function_path: &str, message: StringType) -> Self
    where
        StringType: Into<String>,
    {
        GraphError { kind, message: format!("{}. {}", function_path, message.into()) }
    }

    #[inline]
    pub fn kind(&self) -> GraphErrorKind {
        self.kind
    }
}

// Implementation of Display
impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("GraphError ({}): {}", self.kind, self.message).as_str())
    }
}

// Implementation of Error
impl Error for GraphError {}
