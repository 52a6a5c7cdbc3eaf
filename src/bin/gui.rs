#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use absorption_column_toolbox::{
    absorber::{self, ColumnDesignInput, ColumnDesignResult, LineSample, DEFAULT_SAMPLES},
    config, i18n, report,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Absorption Column Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래의 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let candidates = [
        "assets/fonts/malgun.ttf",
        "assets/fonts/NotoSansKR-Regular.otf",
        "assets/fonts/NotoSansCJKkr-Regular.otf",
    ];
    for cand in candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Design,
    LineChart,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    always_on_top: bool,
    ui_scale: f32,
    apply_initial_view_size: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    // 설계 입력/결과
    design: ColumnDesignInput,
    result: Option<ColumnDesignResult>,
    result_error: Option<String>,
    // 선도 샘플
    samples: Vec<LineSample>,
    sample_count: usize,
    save_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let design = config.design.clone();
        let window_alpha = config.window_alpha.clamp(0.3, 1.0);
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            lang_save_status: None,
            tab: Tab::Design,
            window_alpha,
            always_on_top: false,
            ui_scale: 1.0,
            apply_initial_view_size: true,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            design,
            result: None,
            result_error: None,
            samples: Vec::new(),
            sample_count: DEFAULT_SAMPLES,
            save_status: None,
        }
    }

    /// 현재 입력으로 설계를 수행하고 결과/선도 샘플을 갱신한다.
    fn run_design(&mut self) {
        match absorber::design_column(&self.design) {
            Ok(result) => {
                self.result = Some(result);
                self.result_error = None;
                self.samples = absorber::sample_design_lines(&self.design, self.sample_count)
                    .unwrap_or_default();
            }
            Err(e) => {
                self.result = None;
                self.result_error = Some(e.to_string());
                self.samples.clear();
            }
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Design, txt("gui.tab.design", "Column Design")),
            (Tab::LineChart, txt("gui.tab.line_chart", "Line Chart")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_design(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.design.heading", "Packed Column Design"),
            &txt(
                "gui.design.tip",
                "Size a gas-absorption packed column from steady-state conditions.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("design_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.design.gas_flow", "Gas molar flow G"),
                        &txt("gui.design.gas_flow_tip", "Inlet gas molar flow rate."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.gas_flow_kmol_per_h).speed(10.0));
                    ui.label("kmol/h");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.liquid_flow", "Liquid molar flow L"),
                        &txt("gui.design.liquid_flow_tip", "Absorbent liquid molar flow rate."),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.design.liquid_flow_kmol_per_h).speed(10.0),
                    );
                    ui.label("kmol/h");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.y_in", "Inlet gas fraction y_in"),
                        &txt("gui.design.y_in_tip", "Solute mole fraction in the feed gas."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.y_in).speed(0.001));
                    ui.label("-");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.y_out", "Outlet gas fraction y_out"),
                        &txt("gui.design.y_out_tip", "Target solute mole fraction at the top."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.y_out).speed(0.001));
                    ui.label("-");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.x_in", "Inlet liquid fraction x_in"),
                        &txt("gui.design.x_in_tip", "Solute mole fraction in the lean solvent."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.x_in).speed(0.001));
                    ui.label("-");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.slope", "Equilibrium slope m"),
                        &txt("gui.design.slope_tip", "Henry's-law slope of y* = m·x."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.equilibrium_slope).speed(0.1));
                    ui.label("-");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.hog", "Transfer unit height HOG"),
                        &txt("gui.design.hog_tip", "Height of an overall gas-phase transfer unit."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.hog_m).speed(0.1));
                    ui.label("m");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.temperature", "Gas temperature T"),
                        &txt("gui.design.temperature_tip", "Operating gas temperature."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.temperature_k).speed(1.0));
                    ui.label("K");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.pressure", "Gas pressure P"),
                        &txt("gui.design.pressure_tip", "Operating gas pressure (absolute)."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.pressure_pa).speed(100.0));
                    ui.label("Pa");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.gas_constant", "Gas constant R"),
                        &txt("gui.design.gas_constant_tip", "Ideal-gas constant per kmol."),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.design.gas_constant_j_per_kmol_k).speed(1.0),
                    );
                    ui.label("J/(kmol·K)");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.velocity", "Target gas velocity U_g"),
                        &txt(
                            "gui.design.velocity_tip",
                            "Superficial velocity through the empty column section.",
                        ),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.design.target_velocity_m_per_s).speed(0.1),
                    );
                    ui.label("m/s");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.surface", "Packing specific surface"),
                        &txt("gui.design.surface_tip", "Structured packing surface per volume."),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.design.packing_surface_m2_per_m3)
                            .speed(10.0),
                    );
                    ui.label("m²/m³");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.void", "Packing void fraction"),
                        &txt("gui.design.void_tip", "Open volume fraction of the packed bed."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.packing_void_fraction).speed(0.01));
                    ui.label("-");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.bulk_density", "Packing bulk density"),
                        &txt("gui.design.bulk_density_tip", "Installed packing mass per volume."),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.design.packing_bulk_density_kg_per_m3)
                            .speed(10.0),
                    );
                    ui.label("kg/m³");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.dp_per_m", "Pressure drop per height"),
                        &txt("gui.design.dp_per_m_tip", "Vendor pressure drop per packed meter."),
                    );
                    ui.add(egui::DragValue::new(&mut self.design.packing_dp_pa_per_m).speed(1.0));
                    ui.label("Pa/m");
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.design.element_size", "Packing element size d_p"),
                        &txt("gui.design.element_size_tip", "Nominal packing element size."),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.design.packing_element_size_m).speed(0.001),
                    );
                    ui.label("m");
                    ui.end_row();
                });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .button(txt("gui.design.run", "Run design"))
                    .clicked()
                {
                    self.run_design();
                }
                if ui
                    .button(txt("gui.design.save_inputs", "Save inputs"))
                    .on_hover_text(txt(
                        "gui.design.save_inputs_tip",
                        "Store the current inputs in config.toml.",
                    ))
                    .clicked()
                {
                    self.config.design = self.design.clone();
                    self.save_status = Some(match self.config.save() {
                        Ok(()) => txt("gui.design.saved", "Saved."),
                        Err(e) => format!("Save error: {e}"),
                    });
                }
                if ui
                    .button(txt("gui.design.reset", "Reset to reference case"))
                    .clicked()
                {
                    self.design = ColumnDesignInput::default();
                    self.result = None;
                    self.result_error = None;
                    self.samples.clear();
                }
            });
            if let Some(msg) = &self.save_status {
                ui.small(msg);
            }
        });

        ui.add_space(8.0);
        if let Some(err) = &self.result_error {
            ui.label(format!("{}: {err}", txt("gui.design.error", "Error")));
        }
        if let Some(result) = self.result {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                for line in report::report_lines(&self.design, &result, &self.tr) {
                    ui.label(line.trim_start_matches('\n'));
                }
            });
        }
    }

    fn ui_line_chart(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.chart.heading", "Equilibrium vs Operating Line"),
            &txt(
                "gui.chart.tip",
                "Visual feasibility check: the operating line must stay above y* = m·x.",
            ),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            label_with_tip(
                ui,
                &txt("gui.chart.samples", "Samples"),
                &txt("gui.chart.samples_tip", "Number of evenly spaced points."),
            );
            let mut count = self.sample_count as u32;
            ui.add(egui::DragValue::new(&mut count).speed(1.0));
            self.sample_count = count.clamp(2, 10_000) as usize;
            if ui.button(txt("gui.chart.refresh", "Refresh")).clicked() {
                self.samples = absorber::sample_design_lines(&self.design, self.sample_count)
                    .unwrap_or_default();
            }
        });
        ui.add_space(8.0);
        if self.samples.len() < 2 {
            ui.label(txt(
                "gui.chart.empty",
                "Run the design first to generate line samples.",
            ));
            return;
        }
        draw_line_chart(
            ui,
            &self.samples,
            &txt("gui.chart.eq_legend", "Equilibrium Line (y* = m·x)"),
            &txt("gui.chart.op_legend", "Operating Line"),
            &txt("gui.chart.x_label", "x (liquid mole fraction)"),
            &txt("gui.chart.y_label", "y (gas mole fraction)"),
        );
    }
}

/// 평형선/운전선을 그린다. 별도 차트 라이브러리 없이 painter로 직접 그린다.
fn draw_line_chart(
    ui: &mut egui::Ui,
    samples: &[LineSample],
    eq_legend: &str,
    op_legend: &str,
    x_label: &str,
    y_label: &str,
) {
    let size = egui::vec2(ui.available_width().min(680.0), 380.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    let mut x_max = f64::MIN;
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for s in samples {
        x_max = x_max.max(s.x);
        y_min = y_min.min(s.y_equilibrium.min(s.y_operating));
        y_max = y_max.max(s.y_equilibrium.max(s.y_operating));
    }
    let x_min = 0.0;
    if x_max <= x_min {
        x_max = x_min + 1e-6;
    }
    if y_max <= y_min {
        y_max = y_min + 1e-6;
    }

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.left() + 64.0, rect.top() + 24.0),
        egui::pos2(rect.right() - 16.0, rect.bottom() - 40.0),
    );
    let to_screen = |x: f64, y: f64| {
        egui::pos2(
            plot.left() + ((x - x_min) / (x_max - x_min)) as f32 * plot.width(),
            plot.bottom() - ((y - y_min) / (y_max - y_min)) as f32 * plot.height(),
        )
    };

    let grid_color = ui.visuals().weak_text_color().linear_multiply(0.3);
    let axis_color = ui.visuals().text_color();
    let eq_color = egui::Color32::from_rgb(220, 100, 60);
    let op_color = egui::Color32::from_rgb(70, 130, 210);
    let font = egui::FontId::proportional(11.0);

    // 눈금과 격자
    const TICKS: usize = 5;
    for i in 0..=TICKS {
        let f = i as f64 / TICKS as f64;
        let x = x_min + f * (x_max - x_min);
        let y = y_min + f * (y_max - y_min);
        let px = to_screen(x, y_min).x;
        let py = to_screen(x_min, y).y;
        painter.line_segment(
            [egui::pos2(px, plot.top()), egui::pos2(px, plot.bottom())],
            egui::Stroke::new(0.5, grid_color),
        );
        painter.line_segment(
            [egui::pos2(plot.left(), py), egui::pos2(plot.right(), py)],
            egui::Stroke::new(0.5, grid_color),
        );
        painter.text(
            egui::pos2(px, plot.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            format!("{x:.4}"),
            font.clone(),
            axis_color,
        );
        painter.text(
            egui::pos2(plot.left() - 6.0, py),
            egui::Align2::RIGHT_CENTER,
            format!("{y:.3}"),
            font.clone(),
            axis_color,
        );
    }

    // 축
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        egui::Stroke::new(1.0, axis_color),
    );
    painter.line_segment(
        [plot.left_top(), plot.left_bottom()],
        egui::Stroke::new(1.0, axis_color),
    );
    painter.text(
        egui::pos2(plot.center().x, rect.bottom() - 4.0),
        egui::Align2::CENTER_BOTTOM,
        x_label,
        font.clone(),
        axis_color,
    );
    painter.text(
        egui::pos2(rect.left() + 4.0, rect.top() + 4.0),
        egui::Align2::LEFT_TOP,
        y_label,
        font.clone(),
        axis_color,
    );

    // 두 곡선
    for pair in samples.windows(2) {
        painter.line_segment(
            [
                to_screen(pair[0].x, pair[0].y_equilibrium),
                to_screen(pair[1].x, pair[1].y_equilibrium),
            ],
            egui::Stroke::new(2.0, eq_color),
        );
        painter.line_segment(
            [
                to_screen(pair[0].x, pair[0].y_operating),
                to_screen(pair[1].x, pair[1].y_operating),
            ],
            egui::Stroke::new(2.0, op_color),
        );
    }

    // 범례
    let legend_origin = egui::pos2(plot.left() + 12.0, plot.top() + 8.0);
    for (idx, (color, label)) in [(eq_color, eq_legend), (op_color, op_legend)]
        .into_iter()
        .enumerate()
    {
        let y = legend_origin.y + idx as f32 * 18.0;
        painter.line_segment(
            [
                egui::pos2(legend_origin.x, y),
                egui::pos2(legend_origin.x + 24.0, y),
            ],
            egui::Stroke::new(2.0, color),
        );
        painter.text(
            egui::pos2(legend_origin.x + 30.0, y),
            egui::Align2::LEFT_CENTER,
            label,
            font.clone(),
            axis_color,
        );
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.55).max(900.0), (screen.y * 0.6).max(680.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Absorption Column Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui
                    .button(txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    if ui.button(txt("gui.settings.font_pick", "Choose font…")).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            if let Err(e) =
                                load_custom_font(ctx, &path.display().to_string())
                            {
                                self.lang_save_status = Some(e);
                            }
                        }
                    }
                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline sizing calculator for gas-absorption packed columns",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.units",
                        "Units: SI with molar flows in kmol/h (fixed set, no conversion).",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust language/font in settings if you see issues.",
                    ));
                });
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt(
                        "gui.formula.balance",
                        "Material balance: x_out = G·(y_in − y_out)/L.",
                    ));
                    ui.label(txt(
                        "gui.formula.ntu",
                        "NTU = ln[(y_in − m·x_in)/(y_out − m·x_out)] / (1 − m·L/G); Z = NTU·HOG.",
                    ));
                    ui.label(txt(
                        "gui.formula.gate",
                        "Feasible only while y_out > m·x_out (operating line above equilibrium).",
                    ));
                    ui.separator();
                    ui.heading(txt(
                        "gui.formula.hydraulics",
                        "Hydraulics: Q_G = (G/3600)·R·T/P; A = Q_G/U_g; D = √(4A/π).",
                    ));
                    ui.label(txt(
                        "gui.formula.packing",
                        "Packing: V = A·Z; mass = V·ρ_bulk; ΔP = Z·(dp/m); d_min = max(5·d_p, 0.1·D).",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Design => self.ui_design(ui),
                    Tab::LineChart => self.ui_line_chart(ui),
                });
        });
    }
}
