use crate::core::config::data::Config;

impl Config {
    /// Effective configuration, with defaults filled in for unset keys.
    pub fn print_all(&self) {
        print!("{}", self.describe());
    }

    pub fn describe(&self) -> String {
        let mut out = String::from("Current configuration:\n");
        let mut line = |key: &str, value: String| {
            out.push_str(&format!("  {key}: {value}\n"));
        };

        match &self.theme {
            Some(theme) => line("theme", theme.clone()),
            None => line("theme", "(unset, dark)".to_string()),
        }
        line("assistant-name", self.assistant_name().to_string());
        line(
            "response-delay",
            format!("{}ms", self.response_delay().as_millis()),
        );
        match self.seed {
            Some(seed) => line("seed", seed.to_string()),
            None => line("seed", "(random)".to_string()),
        }

        let params = self.model_parameters();
        line("model.temperature", format!("{:.1}", params.temperature));
        line("model.top-p", format!("{:.1}", params.top_p));
        line("model.max-tokens", params.max_tokens.to_string());

        let engine = self.engine_config();
        let cell = self.cell_metrics();
        line(
            "visualizer.layers",
            format!(
                "{} x {} nodes",
                engine.shape.layer_count, engine.shape.nodes_per_layer
            ),
        );
        line(
            "visualizer.radii",
            format!("node {} / pulse {}", engine.node_radius, engine.pulse_radius),
        );
        line(
            "visualizer.accent",
            format!(
                "#{:02x}{:02x}{:02x}",
                engine.accent.r, engine.accent.g, engine.accent.b
            ),
        );
        line("visualizer.pane-height", format!("{} rows", self.pane_height()));
        line(
            "visualizer.cell",
            format!("{} x {} px", cell.width, cell.height),
        );
        line("visualizer.fps", self.visualizer_fps().to_string());
        out
    }
}
