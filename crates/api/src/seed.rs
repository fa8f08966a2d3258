//! Sample portfolio used by the `folio-seed` binary.
//!
//! Records go through [`ProjectService::create`], so the sample data is held
//! to the same validation as API input.

use folio_db::models::project::Project;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::services::ProjectService;

/// Raw create payloads for the sample portfolio.
pub fn sample_projects() -> Vec<Value> {
    vec![
        json!({
            "title": "Vue Portfolio Monorepo",
            "description": "A modern portfolio built with Vue 3, TypeScript, and microfrontend architecture",
            "fullDescription": "This portfolio showcases a complete monorepo setup with Vue 3, TypeScript, and a microfrontend architecture using Vite Federation. It includes a backend with database integration, Vuetify components, and a professional design system.",
            "technologies": ["Vue 3", "TypeScript", "Node.js", "Express", "MongoDB", "Vite", "Vuetify"],
            "github": "https://github.com/yourusername/vue-portfolio",
            "demo": "https://your-portfolio.com",
            "category": "Full-Stack",
            "status": "completed",
            "year": 2025,
            "icon": "mdi-web",
            "featured": true
        }),
        json!({
            "title": "E-commerce Platform",
            "description": "Full-stack e-commerce solution with payment integration",
            "fullDescription": "A comprehensive e-commerce platform built with modern technologies. Features include user authentication, product catalog, shopping cart, payment processing with Stripe, order management, and admin dashboard.",
            "technologies": ["Vue 3", "Node.js", "PostgreSQL", "Stripe", "JWT", "Docker"],
            "github": "https://github.com/yourusername/ecommerce-platform",
            "demo": "https://ecommerce-demo.com",
            "category": "Full-Stack",
            "status": "in-progress",
            "year": 2024,
            "icon": "mdi-shopping",
            "featured": true
        }),
        json!({
            "title": "Task Management App",
            "description": "Collaborative task management with real-time updates",
            "fullDescription": "A real-time task management application similar to Trello. Features drag-and-drop boards, real-time collaboration using WebSockets, team management, file attachments, and deadline tracking.",
            "technologies": ["Vue 3", "Socket.io", "Node.js", "MongoDB", "Redis"],
            "github": "https://github.com/yourusername/task-manager",
            "demo": "",
            "category": "Frontend",
            "status": "completed",
            "year": 2024,
            "icon": "mdi-clipboard-check",
            "featured": false
        }),
        json!({
            "title": "Weather Dashboard",
            "description": "Interactive weather dashboard with data visualization",
            "fullDescription": "A weather dashboard that displays current conditions, forecasts, and historical data with interactive charts and maps. Integrates with multiple weather APIs for accurate data.",
            "technologies": ["Vue 3", "Chart.js", "Mapbox", "Weather API", "TypeScript"],
            "github": "https://github.com/yourusername/weather-dashboard",
            "demo": "https://weather-demo.com",
            "category": "Frontend",
            "status": "completed",
            "year": 2023,
            "icon": "mdi-weather-cloudy",
            "featured": false
        }),
        json!({
            "title": "DevOps CI/CD Pipeline",
            "description": "Automated deployment pipeline with Docker and Kubernetes",
            "fullDescription": "A complete DevOps solution implementing CI/CD pipelines using GitHub Actions, Docker containerization, and Kubernetes orchestration. Includes automated testing, security scanning, and blue-green deployments.",
            "technologies": ["Docker", "Kubernetes", "GitHub Actions", "Terraform", "AWS"],
            "github": "https://github.com/yourusername/devops-pipeline",
            "demo": "",
            "category": "DevOps",
            "status": "planned",
            "year": 2025,
            "icon": "mdi-rocket-launch",
            "featured": false
        }),
    ]
}

/// Replace every project with the sample portfolio.
pub async fn seed_projects(service: &ProjectService) -> AppResult<Vec<Project>> {
    let removed = service.clear().await?;
    tracing::info!(removed, "Cleared existing projects");

    let mut created = Vec::new();
    for payload in sample_projects() {
        created.push(service.create(&payload).await?);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use folio_core::pagination::PageRequest;
    use folio_core::project::ProjectFilter;
    use folio_db::store::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn seeding_replaces_existing_projects() {
        let service = ProjectService::new(Arc::new(MemoryStore::new()));
        seed_projects(&service).await.unwrap();
        let created = seed_projects(&service).await.unwrap();
        assert_eq!(created.len(), 5);

        let page = service
            .list(&ProjectFilter::default(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 5);
        assert!(page.items[0].featured);
    }

    #[tokio::test]
    async fn empty_demo_links_are_dropped() {
        let service = ProjectService::new(Arc::new(MemoryStore::new()));
        let created = seed_projects(&service).await.unwrap();
        let task_app = created
            .iter()
            .find(|p| p.title == "Task Management App")
            .unwrap();
        assert_eq!(task_app.demo, None);
    }
}
