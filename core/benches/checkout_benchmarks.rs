use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use farmgate::{
  BuyerRef, CartItem, FarmerRef, NewProduct, OrderFilter, OrderStatus, PricingPolicy, Product,
  ProductCategory, Storefront,
};
use tokio::runtime::Runtime; // To run async code within Criterion
use uuid::Uuid;

// --- Common Benchmark Fixtures ---

fn bench_buyer() -> BuyerRef {
  BuyerRef {
    id: Uuid::new_v4(),
    name: "Bench Buyer".to_string(),
    email: "bench@example.com".to_string(),
  }
}

fn bench_product(index: usize) -> NewProduct {
  NewProduct {
    name: format!("Bench Product {}", index),
    description: None,
    price_cents: 299,
    quantity: u32::MAX / 2, // Effectively inexhaustible for the benchmark
    unit: "lb".to_string(),
    category: ProductCategory::Vegetables,
    is_organic: false,
    is_featured: false,
    farmer: FarmerRef {
      id: Uuid::new_v4(),
      name: "Bench Farm".to_string(),
      location: "Portland, OR".to_string(),
      rating: 4.5,
    },
  }
}

async fn seeded_storefront(products: usize) -> (Storefront, Vec<Product>) {
  let market = Storefront::in_memory(PricingPolicy::default());
  let mut seeded = Vec::with_capacity(products);
  for i in 0..products {
    seeded.push(market.catalog.create(bench_product(i)).await.unwrap());
  }
  (market, seeded)
}

// --- Benchmark: place an order, then cancel it ---
// Placing then cancelling keeps stock and the reservation map stable across
// iterations, so each iteration measures the same work.
fn bench_place_then_cancel(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("checkout/place_then_cancel");

  for &lines in &[1usize, 4, 16] {
    let (market, products) = rt.block_on(seeded_storefront(lines));
    let cart: Vec<CartItem> = products
      .iter()
      .map(|p| CartItem { product_id: p.id, quantity: 2 })
      .collect();

    group.throughput(Throughput::Elements(lines as u64));
    group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
      b.to_async(&rt).iter(|| {
        let market = market.clone();
        let cart = cart.clone();
        async move {
          let order = market
            .orders
            .place_order(bench_buyer(), &cart, "12 Elm St", "card")
            .await
            .unwrap();
          market
            .orders
            .update_status(order.id, OrderStatus::Cancelled)
            .await
            .unwrap();
        }
      })
    });
  }
  group.finish();
}

// --- Benchmark: filtered, paginated order listing ---
fn bench_list_orders(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("orders/list");

  for &orders in &[100usize, 1000] {
    let (market, products) = rt.block_on(seeded_storefront(1));
    let cart = [CartItem {
      product_id: products[0].id,
      quantity: 1,
    }];
    rt.block_on(async {
      for _ in 0..orders {
        market
          .orders
          .place_order(bench_buyer(), &cart, "12 Elm St", "card")
          .await
          .unwrap();
      }
    });

    group.throughput(Throughput::Elements(orders as u64));
    group.bench_with_input(BenchmarkId::from_parameter(orders), &orders, |b, _| {
      b.to_async(&rt).iter(|| {
        let market = market.clone();
        async move {
          let filter = OrderFilter {
            search: Some("bench".to_string()),
            page: 2,
            ..OrderFilter::default()
          };
          market.orders.list_orders(&filter).await.unwrap()
        }
      })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_place_then_cancel, bench_list_orders);
criterion_main!(benches);
