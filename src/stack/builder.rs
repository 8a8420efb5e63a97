/// Produces exactly one `T`, considering everything configured beforehand.
pub trait Builder<T> {
    fn build(self) -> T;
}
