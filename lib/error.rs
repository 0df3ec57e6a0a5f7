pub type Result<T, LCDER> = core::result::Result<T, Error<LCDER>>;

#[derive(Debug, PartialEq)]
pub enum Error<LCD> {
    // Display collaborator error
    Lcd(LCD),
    // Integer did not fit the print buffer
    BufferWrite,
    // Stop indicator pin error
    Indicator,
}
