use crate::core::key_enum;

key_enum! {
    /// Chart and dataset types understood by Chart.js and the bundled controllers.
    pub enum ChartType {
        Bar => "bar",
        Line => "line",
        Pie => "pie",
        Doughnut => "doughnut",
        PolarArea => "polarArea",
        Radar => "radar",
        Bubble => "bubble",
        Scatter => "scatter",
        Meter => "meter",
        Gauge => "gauge",
    }
}
