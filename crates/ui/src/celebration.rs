use dioxus::document::eval;
use services::Celebration;

/// Canvas particle burst played in the webview after a submission.
#[derive(Debug, Clone, Copy)]
pub struct ConfettiCelebration {
    particle_count: u32,
    spread_deg: u32,
    origin_y: f64,
}

impl Default for ConfettiCelebration {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread_deg: 70,
            origin_y: 0.6,
        }
    }
}

impl Celebration for ConfettiCelebration {
    fn burst(&self) {
        let js = confetti_script(self.particle_count, self.spread_deg, self.origin_y);
        let _ = eval(&js);
    }
}

pub(crate) fn confetti_script(particle_count: u32, spread_deg: u32, origin_y: f64) -> String {
    format!(
        r##"(function() {{
                    const count = {particle_count};
                    const spread = {spread_deg} * Math.PI / 180;
                    const originY = {origin_y};
                    const colors = ["#6366f1", "#a855f7", "#ec4899", "#eab308", "#22c55e"];
                    const canvas = document.createElement("canvas");
                    const ctx = canvas.getContext && canvas.getContext("2d");
                    if (!ctx) return;
                    canvas.style.cssText = "position:fixed;inset:0;width:100%;height:100%;pointer-events:none;z-index:9999";
                    canvas.width = window.innerWidth;
                    canvas.height = window.innerHeight;
                    document.body.appendChild(canvas);
                    const x0 = canvas.width / 2;
                    const y0 = canvas.height * originY;
                    const particles = [];
                    for (let i = 0; i < count; i++) {{
                        const angle = -Math.PI / 2 + (Math.random() - 0.5) * spread;
                        const speed = 8 + Math.random() * 8;
                        particles.push({{
                            x: x0,
                            y: y0,
                            vx: Math.cos(angle) * speed,
                            vy: Math.sin(angle) * speed,
                            size: 5 + Math.random() * 5,
                            color: colors[i % colors.length],
                            life: 0,
                        }});
                    }}
                    const maxLife = 180;
                    const step = () => {{
                        ctx.clearRect(0, 0, canvas.width, canvas.height);
                        let alive = 0;
                        for (const p of particles) {{
                            p.life += 1;
                            if (p.life > maxLife) continue;
                            alive += 1;
                            p.vx *= 0.98;
                            p.vy = p.vy * 0.98 + 0.3;
                            p.x += p.vx;
                            p.y += p.vy;
                            ctx.globalAlpha = 1 - p.life / maxLife;
                            ctx.fillStyle = p.color;
                            ctx.fillRect(p.x, p.y, p.size, p.size * 0.6);
                        }}
                        if (alive > 0) {{
                            requestAnimationFrame(step);
                        }} else {{
                            canvas.remove();
                        }}
                    }};
                    requestAnimationFrame(step);
                }})();"##,
        particle_count = particle_count,
        spread_deg = spread_deg,
        origin_y = origin_y,
    )
}
