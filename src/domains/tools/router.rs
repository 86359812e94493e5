//! Tool Router - builds the rmcp ToolRouter for the configured service.
//!
//! Each tool knows how to create its own route; this module only selects
//! which service's tools go into the router. The todo service additionally
//! opens its backing task store here, so router construction can fail.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::{Config, ServiceKind};

use super::definitions::todo::TaskStore;
use super::definitions::{
    AddTaskTool, DeleteTaskTool, EverythingTool, FullInfoTool, ListSourcesTool, ListTasksTool,
    MeaningTool, MeaningsOfStemsTool, ModifyTaskTool, PartOfSpeechTool, PronunciationsTool,
    StemInfoTool, StemsTool, TopHeadlinesTool,
};

/// Build the tool router for the configured service.
pub fn build_tool_router<S>(config: Arc<Config>) -> crate::core::Result<ToolRouter<S>>
where
    S: Send + Sync + 'static,
{
    let router = match config.service {
        ServiceKind::Dictionary => ToolRouter::new()
            .with_route(MeaningTool::create_route(config.clone()))
            .with_route(PartOfSpeechTool::create_route(config.clone()))
            .with_route(PronunciationsTool::create_route(config.clone()))
            .with_route(StemsTool::create_route(config.clone()))
            .with_route(MeaningsOfStemsTool::create_route(config.clone()))
            .with_route(StemInfoTool::create_route(config.clone()))
            .with_route(FullInfoTool::create_route(config)),
        ServiceKind::News => ToolRouter::new()
            .with_route(TopHeadlinesTool::create_route(config.clone()))
            .with_route(EverythingTool::create_route(config.clone()))
            .with_route(ListSourcesTool::create_route(config)),
        ServiceKind::Todo => {
            let store = Arc::new(TaskStore::open(config.todo.tasks_file.clone())?);
            ToolRouter::new()
                .with_route(AddTaskTool::create_route(store.clone()))
                .with_route(ListTasksTool::create_route(store.clone()))
                .with_route(ModifyTaskTool::create_route(store.clone()))
                .with_route(DeleteTaskTool::create_route(store))
        }
    };
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn router_for(service: ServiceKind, config: Config) -> Vec<String> {
        let router: ToolRouter<TestServer> =
            build_tool_router(Arc::new(Config { service, ..config })).unwrap();
        router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect()
    }

    #[test]
    fn test_dictionary_router() {
        let names = router_for(
            ServiceKind::Dictionary,
            Config::for_service(ServiceKind::Dictionary),
        );
        assert_eq!(names.len(), 7);
        for name in [
            "meaning",
            "part_of_speech",
            "pronunciations",
            "stems",
            "meanings_of_stems",
            "stem_info",
            "full_info",
        ] {
            assert!(names.iter().any(|n| n == name), "missing tool {name}");
        }
    }

    #[test]
    fn test_news_router() {
        let names = router_for(ServiceKind::News, Config::for_service(ServiceKind::News));
        assert_eq!(names.len(), 3);
        for name in ["top_headlines", "everything", "list_sources"] {
            assert!(names.iter().any(|n| n == name), "missing tool {name}");
        }
    }

    #[test]
    fn test_todo_router_opens_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::for_service(ServiceKind::Todo);
        config.todo.tasks_file = dir.path().join("tasks.csv");

        let names = router_for(ServiceKind::Todo, config.clone());
        assert_eq!(names.len(), 4);
        for name in ["add_task", "list_tasks", "modify_task", "delete_task"] {
            assert!(names.iter().any(|n| n == name), "missing tool {name}");
        }
        assert!(config.todo.tasks_file.exists());
    }
}
