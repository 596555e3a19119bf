mod surface;
pub use self::surface::{ApiSurface, Side, Species, VertexId};

mod similarity;
pub use self::similarity::CrossSpeciesSimilarityResponse;

mod nimare;
pub use self::nimare::{NiMareFeature, NiMareResponse};
