/// Classification of a volume against a convex region.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryClass {
    /// The volume lies entirely inside of the region.
    Inside,
    /// The volume lies entirely outside of the region.
    Outside,
    /// The volume may overlap the boundary of the region.
    Intersecting,
}
