pub trait NiceDisplay {
    fn message(&self) -> String;
}
