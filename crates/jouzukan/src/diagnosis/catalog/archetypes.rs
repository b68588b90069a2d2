use serde::{Deserialize, Serialize};

use super::super::dimension::Dimension::*;
use super::super::rules::{Condition, PriorityRule};

pub const DONKEY: &str = "donkey";
pub const FISH: &str = "fish";
pub const CAMEL: &str = "camel";

/// Archetypes only reachable through the group comparison fallback.
pub const FALLBACK_ARCHETYPES: [&str; 3] = [DONKEY, FISH, CAMEL];

/// Result category returned by classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: String,
    pub display_name: String,
    pub catchphrase: String,
    pub description: String,
    pub legend_name: String,
    pub legend_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_rule: Option<PriorityRule>,
}

struct Entry {
    id: &'static str,
    display_name: &'static str,
    catchphrase: &'static str,
    legend_name: &'static str,
    legend_role: &'static str,
    description: &'static str,
}

impl Entry {
    fn build(self, priority_rule: Option<PriorityRule>) -> Archetype {
        Archetype {
            id: self.id.to_string(),
            display_name: self.display_name.to_string(),
            catchphrase: self.catchphrase.to_string(),
            description: self.description.to_string(),
            legend_name: self.legend_name.to_string(),
            legend_role: self.legend_role.to_string(),
            priority_rule,
        }
    }
}

/// The twelve archetypes in encyclopedia order.
pub(crate) fn standard_archetypes() -> Vec<Archetype> {
    vec![
        Entry {
            id: "lion",
            display_name: "ライオン (Lion)",
            catchphrase: "「信念つらぬき」じょうずなライオン",
            legend_name: "山本 松雄さん",
            legend_role: "創業者",
            description: "あなたは百獣の王ライオンタイプ！JOHNANの歴史を切り開く創業者のように、「こうあるべきだ！」という強い信念と、みんなを引っ張るリーダーシップを持っています。",
        }
        .build(Some(PriorityRule::new(
            "lion.conviction",
            6,
            vec![
                Condition::at_least(UniversalTruth, 13.0),
                Condition::count_at_least(&[Responsibility, Mission], 12.0, 1),
            ],
        ))),
        Entry {
            id: "dove",
            display_name: "ハト (Dove)",
            catchphrase: "「愛をとどけ」じょうずなハト",
            legend_name: "山本 春子さん",
            legend_role: "愛の精神的支柱",
            description: "あなたは平和のシンボル、ハトタイプ！みんなの心を癒やす、優しさの塊のような人です。組織の歴史の中で、みんなが安心して働ける場所を守り続ける慈愛の精神を持っています。",
        }
        .build(Some(PriorityRule::new(
            "dove.gentle_care",
            9,
            vec![
                Condition::at_least(Warmth, 13.0),
                Condition::at_least(Respect, 11.5),
            ],
        ))),
        Entry {
            id: "eagle",
            display_name: "ワシ (Eagle)",
            catchphrase: "「未来見通し」じょうずなワシ",
            legend_name: "山本 光世さん",
            legend_role: "変革の4代目",
            description: "あなたは空の王者ワシタイプ！遠くまで見渡す目を持っていて、「次はこれが来る！」と未来を見通すのが得意。新しい時代に向かって、JOHNANを大きく飛躍させる先見の明があります。",
        }
        .build(Some(PriorityRule::new(
            "eagle.foresight",
            7,
            vec![
                Condition::at_least(Mission, 13.0),
                Condition::count_at_least(&[Innovation, DivineGuidance], 11.5, 1),
            ],
        ))),
        Entry {
            id: "deer",
            display_name: "シカ (Deer)",
            catchphrase: "「バランス」じょうずなシカ",
            legend_name: "山本 高春さん",
            legend_role: "誠実な3代目",
            description: "あなたはスマートなシカタイプ！高い理想を持ちながらも、足元もしっかり見ることができるバランス感覚の持ち主。組織の規律を守り、誠実さで信頼を築くリーダーと同じ精神を持っています。",
        }
        .build(Some(PriorityRule::new(
            "deer.balanced_integrity",
            5,
            vec![
                Condition::at_least(Thoroughness, 12.0),
                Condition::count_at_least(&[UniversalTruth, Respect, Responsibility], 11.5, 2),
            ],
        ))),
        Entry {
            id: "bull",
            display_name: "オウシ (Bull)",
            catchphrase: "「現場をまもり」じょうずなオウシ",
            legend_name: "稲葉 和雄さん",
            legend_role: "製造のレジェンド",
            description: "あなたはパワフルなオウシタイプ！「任せとけ！」という頼もしさはナンバーワン。JOHNANのモノづくりを支え、どんな困難な仕事も完遂する、現場の守護神のような存在です。",
        }
        .build(Some(PriorityRule::new(
            "bull.field_guardian",
            8,
            vec![Condition::at_least(Responsibility, 13.0)],
        ))),
        Entry {
            id: "ant",
            display_name: "アリ (Ant)",
            catchphrase: "「コツコツ積み上げ」じょうずなアリ",
            legend_name: "村上 英子さん",
            legend_role: "財務の礎を築いた人",
            description: "あなたは働き者のアリさんタイプ！小さなことでもコツコツと積み上げ、いつの間にか大きな成果を出しています。派手ではなくとも、組織の土台をしっかり支える縁の下の偉人です。",
        }
        .build(Some(PriorityRule::new(
            "ant.steady_builder",
            4,
            vec![
                Condition::at_least(Thoroughness, 13.0),
                Condition::at_least(HeavenlyWork, 11.5),
            ],
        ))),
        Entry {
            id: "serpent",
            display_name: "ヘビ (Serpent)",
            catchphrase: "「知恵みがき」じょうずなヘビ",
            legend_name: "佐野 好男さん",
            legend_role: "開発のパイオニア",
            description: "あなたは知恵者なヘビタイプ！冷静に物事を見つめ、技術や知識を深めるのが得意なスペシャリスト。技術の力で新しい価値を生み出す、探求心あふれる開拓者と同じタイプです。",
        }
        .build(Some(PriorityRule::new(
            "serpent.inventive_rigor",
            1,
            vec![
                Condition::at_least(Innovation, 12.5),
                Condition::at_least(Thoroughness, 12.0),
            ],
        ))),
        Entry {
            id: "lamb",
            display_name: "コヒツジ (Lamb)",
            catchphrase: "「愛され応援され」じょうずなコヒツジ",
            legend_name: "山本 勝さん",
            legend_role: "2代目社長",
            description: "あなたはピュアなコヒツジタイプ！純粋な心を持っていて、新しいことにも素直に挑戦できます。創業の精神を受け継ぎつつ、みんなから愛され応援される若きリーダーの素質があります。",
        }
        .build(Some(PriorityRule::new(
            "lamb.grateful_heart",
            2,
            vec![
                Condition::at_least(HeavenlyWork, 12.5),
                Condition::count_at_least(&[Warmth, Innovation, Respect], 11.5, 2),
            ],
        ))),
        Entry {
            id: "horse",
            display_name: "ウマ (Horse)",
            catchphrase: "「目標駆け抜け」じょうずなウマ",
            legend_name: "金光 宏さん",
            legend_role: "デバイス事業の開拓者",
            description: "あなたは駆け抜けるウマタイプ！行動力がバツグンで、目標に向かって一直線に走ります。新しい事業や困難な現場にいち早く駆けつけ、道を切り開くスピードスターと同じ魂を持っています。",
        }
        .build(Some(PriorityRule::new(
            "horse.driven_pioneer",
            3,
            vec![
                Condition::at_least(Responsibility, 12.5),
                Condition::at_least(Mission, 11.5),
                Condition::at_least(Innovation, 11.5),
            ],
        ))),
        Entry {
            id: CAMEL,
            display_name: "ラクダ (Camel)",
            catchphrase: "「忍耐づよく歩き」じょうずなラクダ",
            legend_name: "阿部 和幸さん",
            legend_role: "生産管理の守り神",
            description: "あなたは忍耐強いラクダタイプ！砂漠のような厳しい環境でも、文句を言わずに確実に歩き続けることができます。組織の規律や納期をガッチリ守り続ける、最も信頼できる実直なレジェンドです。",
        }
        .build(None),
        Entry {
            id: DONKEY,
            display_name: "ロバ (Donkey)",
            catchphrase: "「平和をはこび」じょうずなロバ",
            legend_name: "井口 江利子さん & 吉岡 三重子さん",
            legend_role: "奉仕のレジェンド",
            description: "あなたは優しいロバタイプ！一見地味に見えるかもしれないけれど、実は一番大切な「平和」と「安心」を運んでいます。地道な仕事を責任を持ってやり遂げ、誰かの荷物をスッと持ってあげるような、謙虚で温かい奉仕の心が輝くレジェンドです。",
        }
        .build(None),
        Entry {
            id: FISH,
            display_name: "サカナ (Fish)",
            catchphrase: "「奇跡をおこし」じょうずなサカナ",
            legend_name: "小泉 由佳さん & 高見 恵美さん",
            legend_role: "可能性のレジェンド",
            description: "あなたは可能性を秘めたサカナタイプ！小さなきっかけから、びっくりするような大きな成果（奇跡）を生み出すパワーを持っています。群れ（チーム）の中で自由に泳ぎながら、みんなを楽しい未来へ連れて行くムードメーカーです。",
        }
        .build(None),
    ]
}
