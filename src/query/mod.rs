mod common;
pub use self::common::Query;

mod surface;
pub use self::surface::SurfaceQuery;

mod similarity;
pub use self::similarity::SimilarityQuery;

mod nimare;
pub use self::nimare::NimareQuery;
