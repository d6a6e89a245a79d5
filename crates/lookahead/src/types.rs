use engine::Square;

/// One ply's worth of destinations, tagged with the remaining depth at
/// which they were generated (the requested depth counts down to 0).
pub type DepthBin = (i32, Vec<Square>);

/// Practical lookahead bound. Cost grows exponentially with depth and
/// nothing in the search cuts it off; callers own the bound.
pub const MAX_LOOKAHEAD_DEPTH: i32 = 3;
