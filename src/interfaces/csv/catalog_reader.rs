use crate::domain::product::Product;
use crate::error::ShopError;
use std::io::Read;

/// Reads catalog rows (`id,name,unit_price,stock`) from CSV.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn products(self) -> impl Iterator<Item = Result<Product, ShopError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ShopError::from))
    }
}
