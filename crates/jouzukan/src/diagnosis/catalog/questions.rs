use std::collections::BTreeMap;

use super::super::dimension::Dimension::{self, *};
use super::super::domain::Question;

fn question(id: u32, text: &str, weights: &[(Dimension, f64)]) -> Question {
    Question {
        id,
        text: text.to_string(),
        weights: weights.iter().copied().collect::<BTreeMap<_, _>>(),
    }
}

/// The 18-question battery.
pub(crate) fn standard_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "自分の意見と対立する話を聞いたとき、すぐに反論するのではなく「なぜそう思うのか」を深く理解しようとする。",
            &[(Respect, 1.2), (Warmth, 0.3), (UniversalTruth, -0.3)],
        ),
        question(
            2,
            "チーム全体がうまくいくなら、自分の手柄にならなくても喜んで裏方に回ることができる。",
            &[(Respect, 1.0), (HeavenlyWork, 0.8), (Responsibility, -0.3)],
        ),
        question(
            3,
            "忙しいときでも、周りの人が困っている様子なら、手を止めて声をかけたり手伝ったりする。",
            &[(Warmth, 1.5), (Thoroughness, -0.5), (Responsibility, -0.2)],
        ),
        question(
            4,
            "一人で黙々と作業するよりも、みんなでわいわい議論しながら作り上げるプロセスが好きだ。",
            &[(Warmth, 1.0), (Innovation, 0.5), (Thoroughness, -0.6)],
        ),
        question(
            5,
            "一度「やる」と決めたことは、どんなに状況が悪化しても、意地でも最後までやり遂げる。",
            &[(Responsibility, 1.5), (UniversalTruth, 0.4), (Innovation, -0.5)],
        ),
        question(
            6,
            "困難なトラブルが起きたとき、「困った」と落ち込むより、「腕の見せ所だ」と逆に燃えてくる。",
            &[(Responsibility, 1.2), (Mission, 0.6), (Thoroughness, -0.3)],
        ),
        question(
            7,
            "もし会社やチームが間違ったことをしようとしたら、空気を読まずに「それは違う」と言う覚悟がある。",
            &[(UniversalTruth, 1.5), (Responsibility, 0.3), (Respect, -0.5)],
        ),
        question(
            8,
            "ルールや利益も大事だが、それ以上に「人としての自由」や「愛」が守られているかを重視する。",
            &[(UniversalTruth, 1.2), (Warmth, 0.8), (Thoroughness, -0.6)],
        ),
        question(
            9,
            "人生の転機を振り返ると、自分の計算や努力だけでは説明できない「不思議な巡り合わせ」に助けられたと感じる。",
            &[(DivineGuidance, 1.5), (HeavenlyWork, 0.5), (Thoroughness, -0.4)],
        ),
        question(
            10,
            "根拠はなくても「最終的には絶対うまくいく」という謎の自信や安心感を持っていることが多い。",
            &[(DivineGuidance, 1.2), (Mission, 0.6), (Thoroughness, -0.6)],
        ),
        question(
            11,
            "目の前の仕事が、10年後や100年後の未来にどうつながるかを想像しながら取り組んでいる。",
            &[(Mission, 1.5), (Innovation, 0.5), (Thoroughness, -0.3)],
        ),
        question(
            12,
            "私利私欲のためではなく、「誰かのため」「社会のため」という大義名分があるとき、一番力が出る。",
            &[(Mission, 1.2), (UniversalTruth, 0.8), (Respect, -0.2)],
        ),
        question(
            13,
            "今の仕事や役割を与えられていることに対して、不満よりも「ありがたい」という気持ちが先に立つ。",
            &[(HeavenlyWork, 1.5), (DivineGuidance, 0.4), (Innovation, -0.5)],
        ),
        question(
            14,
            "商品やサービスを作るとき、「売れるか」と同じくらい「それが世の中を良くするか」を大切にしたい。",
            &[(HeavenlyWork, 1.0), (UniversalTruth, 0.8), (Thoroughness, -0.4)],
        ),
        question(
            15,
            "机の上やデータの整理整頓がされていないと、どうしても気になって仕事に集中できない。",
            &[
                (Thoroughness, 1.5),
                (Responsibility, 0.3),
                (Innovation, -0.8),
                (DivineGuidance, -0.3),
            ],
        ),
        question(
            16,
            "なんとなく上手くいった時よりも、失敗してもその原因を完全に突き止めた時の方がスッキリする。",
            &[(Thoroughness, 1.2), (UniversalTruth, 0.5), (Warmth, -0.4)],
        ),
        question(
            17,
            "「いつも通りのやり方」を繰り返すのは退屈で、常に「もっと面白い方法はないか」と工夫したくなる。",
            &[
                (Innovation, 1.5),
                (Mission, 0.4),
                (Thoroughness, -1.0),
                (HeavenlyWork, -0.3),
            ],
        ),
        question(
            18,
            "他の人が「ありえない」と笑うような突飛なアイデアこそ、実現する価値があると思う。",
            &[
                (Innovation, 1.2),
                (Responsibility, 0.5),
                (DivineGuidance, 0.3),
                (Respect, -0.3),
            ],
        ),
    ]
}
