use chrono::{Duration, Utc};
use listing_search::{
    CatalogItem, Condition, HybridSearchEngine, RecommendationEngine, SearchFilters,
};

fn listing(id: &str, title: &str, description: &str, price: f64, condition: Condition, days_ago: i64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: "Furniture".to_string(),
        price,
        condition,
        location: "Springfield".to_string(),
        seller_id: "demo-seller".to_string(),
        images: vec![format!("{id}.jpg")],
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

fn main() {
    // build a small catalog snapshot
    let catalog = vec![
        listing("sofa-1", "Brown leather sofa", "soft three seater", 350.0, Condition::Good, 2),
        listing("sofa-2", "Black leather couch", "large corner couch", 420.0, Condition::LikeNew, 1),
        listing("chair-1", "Garden chair", "weatherproof plastic chair", 25.0, Condition::New, 5),
        listing("lamp-1", "Desk lamp", "bright office lighting", 18.0, Condition::Fair, 9),
    ];

    // hybrid search: keyword + semantic passes, merged and ranked
    let engine = HybridSearchEngine::new();
    let filters = SearchFilters {
        max_price: Some(500.0),
        ..SearchFilters::default()
    };
    println!("search \"couch\":");
    for hit in engine.search(&catalog, "couch", &filters, 10) {
        println!("  {:>8.2}  {:?}  {}", hit.score, hit.kind, hit.item.title);
    }

    // recommendations over the same snapshot
    let mut recommender = RecommendationEngine::new();
    recommender.initialize(&catalog);

    println!("similar to sofa-1:");
    for rec in recommender.similar_items("sofa-1", 3) {
        println!("  {:.2}  {}", rec.score, rec.listing.title);
    }

    println!("personalized after viewing sofa-1 and chair-1:");
    let viewed = vec!["sofa-1".to_string(), "chair-1".to_string()];
    for rec in recommender.personalized(&viewed, 3) {
        println!("  {:.2}  {}", rec.score, rec.listing.title);
    }

    println!("trending:");
    for rec in recommender.trending(3) {
        println!("  {:.2}  {}", rec.score, rec.listing.title);
    }
}
