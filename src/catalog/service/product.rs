//! Product Service - passthrough CRUD over the product repository

use crate::catalog::dto::ProductDto;
use crate::catalog::error::StoreResult;
use crate::catalog::models::Product;
use crate::catalog::repository::DynProductRepository;

pub struct ProductService {
    products: DynProductRepository,
}

impl ProductService {
    pub fn new(products: DynProductRepository) -> Self {
        Self { products }
    }

    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<ProductDto>> {
        tracing::info!(product_id = id, "Getting product by ID");
        Ok(self.products.find_by_id(id).await?.map(ProductDto::from))
    }

    pub async fn get_all(&self) -> StoreResult<Vec<ProductDto>> {
        tracing::info!("Getting all products");
        let products = self.products.find_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn create(&self, dto: ProductDto) -> StoreResult<ProductDto> {
        tracing::info!(name = %dto.name, cost = dto.cost, "Adding new product");
        let product = Product {
            id: None,
            ..Product::from(dto)
        };
        Ok(self.products.save(product).await?.into())
    }

    /// `false` when no product has this id
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        tracing::info!(product_id = id, "Deleting product");
        self.products.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::repository::MemoryStore;

    #[tokio::test]
    async fn test_product_crud() {
        let svc = ProductService::new(Arc::new(MemoryStore::new().products()));

        let created = svc
            .create(ProductDto {
                id: Some(500),
                name: "Widget".to_string(),
                cost: 50.0,
            })
            .await
            .unwrap();
        let id = created.id.unwrap();
        assert_ne!(id, 500);

        assert_eq!(svc.get_by_id(id).await.unwrap(), Some(created.clone()));
        assert_eq!(svc.get_all().await.unwrap(), vec![created]);

        assert!(svc.delete(id).await.unwrap());
        assert!(!svc.delete(id).await.unwrap());
        assert!(svc.get_by_id(id).await.unwrap().is_none());
    }
}
